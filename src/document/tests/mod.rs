mod pdfium_tests;
