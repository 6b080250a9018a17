pub mod rounds;
