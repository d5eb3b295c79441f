pub mod basket_input;
