pub mod temp_file;
