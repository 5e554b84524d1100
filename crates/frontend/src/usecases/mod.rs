pub mod u501_concurrency_demo;
