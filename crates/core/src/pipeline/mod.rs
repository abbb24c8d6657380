pub mod find_fragments_use_case;
