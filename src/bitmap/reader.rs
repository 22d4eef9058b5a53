pub mod decoded;
