pub mod settings_reader;
