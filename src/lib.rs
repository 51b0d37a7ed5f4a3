pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_bus;
        pub mod event_store;
        pub mod intent_outbox;
        pub mod processed_events;
        pub mod pub_sub;
    }
}

pub mod modules {
    pub mod content_banks {
        pub mod core {
            pub mod bank;
            pub mod decision;
            pub mod events;
            pub mod evolve;
        }
        pub mod use_cases {
            pub mod create_content_bank {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod delete_content_bank {
                pub mod decide;
                pub mod handler;
            }
            pub mod create_default_content_bank {
                pub mod handler;
                pub mod inbound {
                    pub mod kafka;
                }
            }
            pub mod duplicate_content_bank {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod find_content_banks {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod intent_outbox;
                pub mod repository;
                pub mod repository_in_memory;
                pub mod state_store;
            }
        }
    }
    pub mod content_entries {
        pub mod core {
            pub mod decision;
            pub mod entry;
            pub mod events;
            pub mod evolve;
            pub mod intents;
        }
        pub mod use_cases {
            pub mod apply_generated_topics {
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod kafka;
                }
            }
            pub mod clone_content_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod create_content_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod delete_content_entry {
                pub mod decide;
                pub mod handler;
            }
            pub mod discard_failed_topics {
                pub mod handler;
                pub mod inbound {
                    pub mod kafka;
                }
            }
            pub mod find_content_entries {
                pub mod handler;
                pub mod view;
            }
            pub mod mark_questions_generated {
                pub mod decide;
                pub mod handler;
            }
            pub mod update_content_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod intent_outbox;
                pub mod repository;
                pub mod repository_in_memory;
                pub mod state_store;
            }
        }
    }
    pub mod instructions {
        pub mod core {
            pub mod instruction;
        }
        pub mod use_cases {
            pub mod find_instruction {
                pub mod handler;
            }
            pub mod save_instruction {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod repository;
                pub mod repository_in_memory;
            }
        }
    }
    pub mod questions {
        pub mod core {
            pub mod question;
        }
        pub mod use_cases {
            pub mod create_question {
                pub mod command;
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod repository;
                pub mod repository_in_memory;
            }
        }
    }
    pub mod quizzes {
        pub mod core {
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod projections;
            pub mod questions;
            pub mod state;
            pub mod status;
        }
        pub mod use_cases {
            pub mod add_quiz_questions {
                pub mod collect;
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod apply_generated_questions {
                pub mod handler;
                pub mod inbound {
                    pub mod kafka;
                }
                pub mod payload;
            }
            pub mod check_quiz_in_progress {
                pub mod handler;
            }
            pub mod create_quiz {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod delete_quiz {
                pub mod decide;
                pub mod handler;
            }
            pub mod find_quiz {
                pub mod handler;
                pub mod view;
            }
            pub mod list_quizzes_by_user {
                pub mod handler;
                pub mod projection;
                pub mod queries_port;
                pub mod runner;
            }
            pub mod mark_quiz_answer {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod update_quiz_status {
                pub mod decide;
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_store;
                pub mod intent_outbox;
                pub mod projections;
                pub mod projections_in_memory;
                pub mod sources;
            }
        }
    }
    pub mod topics {
        pub mod core {
            pub mod topic;
        }
        pub mod use_cases {
            pub mod find_or_create_topic {
                pub mod handler;
            }
            pub mod list_topics_by_user {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod repository;
                pub mod repository_in_memory;
            }
        }
    }
}

pub mod shell;
