pub mod reset_password;
