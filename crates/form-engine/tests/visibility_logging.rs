//! Logging behaviour of visibility reads

use std::io;
use std::sync::{Arc, Mutex};

use form_engine::{BooleanField, Field, Form, TextField};
use tracing::Level;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn unresolved_source_does_not_warn_on_read() {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = subscriber.set_default();

    let source = Field::new("elsewhere", BooleanField::new());
    let mut dependent = Field::new("dependent", TextField::new());
    dependent.add_conditional(&source, true).unwrap();

    let mut form = Form::new("F");
    form.add_field(dependent).unwrap();
    for _ in 0..3 {
        assert_eq!(form.visible_fields().count(), 0);
    }

    assert!(buf.0.lock().unwrap().is_empty());
}
