pub mod u900_profile_report;
