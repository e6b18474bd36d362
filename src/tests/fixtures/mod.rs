pub mod employees;
pub mod html;
pub mod http;
pub mod shifts;
