mod command_runner;
mod full_run;
mod primitive_properties;
