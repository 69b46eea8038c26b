mod figure_store_tests;
