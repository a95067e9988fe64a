pub mod a001_currency;
pub mod a002_unit;
pub mod a003_company;
pub mod a004_purchaser;
pub mod a005_product;
pub mod a006_project;
pub mod a007_contract;
pub mod a008_payment;
pub mod a009_attachment;
