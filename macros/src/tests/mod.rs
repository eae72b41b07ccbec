mod choice_enum_tests;
