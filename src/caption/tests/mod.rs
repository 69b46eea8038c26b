mod locator_tests;
