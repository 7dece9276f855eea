pub mod aggregation_scheduler;
