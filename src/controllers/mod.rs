pub mod plate_controller;
