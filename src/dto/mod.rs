pub mod auth_dto;
pub mod car_dto;
pub mod route_dto;
pub mod trip_dto;
pub mod rotation_dto;
