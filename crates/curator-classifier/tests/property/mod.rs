mod classifier_properties;
