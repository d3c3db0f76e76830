pub mod plate_service;
