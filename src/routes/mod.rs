pub mod plate_routes;
