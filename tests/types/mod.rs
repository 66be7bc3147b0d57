pub mod located_error;
