pub mod catalog;
pub mod pages;
pub mod renovation;
pub mod upload;
