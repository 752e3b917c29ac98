pub mod checksum;
pub mod generator;
pub mod mask;
pub mod validator;
