pub mod mps_server;
