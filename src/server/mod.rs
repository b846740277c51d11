pub mod review_server;
