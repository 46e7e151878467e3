pub mod detect;
pub mod doctor;
pub mod install;
pub mod verify;
