mod core_properties;
