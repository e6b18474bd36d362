pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod backend;
    }
    pub mod web {
        pub mod errors;
        pub mod html;
    }
}

pub mod modules {
    pub mod employees {
        pub mod core {
            pub mod employee;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod list_employees {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod save_employee {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod http_directory;
            }
        }
        pub mod views;
    }

    pub mod schedule {
        pub mod core {
            pub mod calendar;
            pub mod ports;
            pub mod shift;
        }
        pub mod use_cases {
            pub mod view_calendar {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod save_shift {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_shift {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod http_schedule;
            }
        }
        pub mod views;
    }

    pub mod analytics {
        pub mod core {
            pub mod ports;
            pub mod summary;
        }
        pub mod use_cases {
            pub mod view_summary {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod http_analytics;
            }
        }
        pub mod views;
    }
}

pub mod shell;
