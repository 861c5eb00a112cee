pub mod shared {
    pub mod http {
        pub mod api_error;
        pub mod status_response;
    }
}

pub mod modules {
    pub mod operations {
        pub mod core {
            pub mod operation;
        }
        pub mod use_cases {
            pub mod record_operation {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_operations {
                pub mod inbound {
                    pub mod http;
                }
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod operation_store;
                pub mod operation_store_in_memory;
            }
        }
    }
}

pub mod shell;
