pub mod u601_connect_database;
pub mod u602_upload_documents;
pub mod u603_run_query;
