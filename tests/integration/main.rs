mod batch_test;
mod e2e_test;
mod properties_test;
