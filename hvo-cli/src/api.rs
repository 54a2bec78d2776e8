pub mod tankerkoenig;
