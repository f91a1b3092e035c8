mod helpers;

mod cascade_test;
