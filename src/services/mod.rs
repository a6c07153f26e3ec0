pub mod customizer;
pub mod deploy_script_generator;
pub mod file_modifier;
pub mod rebrand_rules;
pub mod report_generator;
pub mod stylesheet_generator;
