diesel::table! {
    invoices (id) {
        id -> BigInt,
        invoice_id -> Text,
        recipient_address -> Text,
        recipient_email -> Nullable<Text>,
        recipient_name -> Nullable<Text>,
        amount -> Double,
        status -> Text,
        created_date -> Timestamp,
        due_date -> Nullable<Timestamp>,
        description -> Nullable<Text>,
        blockchain_tx_hash -> Nullable<Text>,
    }
}

diesel::table! {
    email_logs (id) {
        id -> BigInt,
        invoice_id -> Text,
        email_sent_to -> Text,
        sent_date -> Timestamp,
        email_type -> Text,
        status -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(invoices, email_logs,);
