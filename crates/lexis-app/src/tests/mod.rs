mod ui_loop_tests;
