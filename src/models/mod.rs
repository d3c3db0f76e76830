pub mod plate;
