pub mod plate_dto;
