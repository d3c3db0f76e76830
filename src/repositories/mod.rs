pub mod plate_repository;

#[cfg(test)]
pub mod memory;
