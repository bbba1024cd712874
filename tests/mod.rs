mod badge_tests;
mod projection_tests;
