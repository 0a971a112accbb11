pub mod translation_length;
