//! Builders shared by the behavioral tests.

use shared_types::{Class, Enrollment, Invoice, InvoiceStatus};

pub fn class(id: &str, start: &str, max: u32, enrolled: u32) -> Class {
    Class {
        class_id: id.to_string(),
        title: format!("Class {id}"),
        description: None,
        teacher_id: "t1".to_string(),
        teacher_name: "Ms. Rivera".to_string(),
        start_time: start.to_string(),
        end_time: start.to_string(),
        max_students: max,
        enrolled_count: enrolled,
        meet_link: None,
    }
}

pub fn enrollment(class_id: &str) -> Enrollment {
    Enrollment {
        class_id: class_id.to_string(),
        student_id: None,
    }
}

pub fn invoice(id: &str, amount: f64, status: InvoiceStatus) -> Invoice {
    Invoice {
        invoice_id: id.to_string(),
        student_id: "s1".to_string(),
        amount,
        description: "Tuition".to_string(),
        due_date: "2026-09-01".to_string(),
        status,
    }
}
