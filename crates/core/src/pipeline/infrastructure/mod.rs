pub mod quadrant_worker_pool;
