use backoffice_core::notify::{Notice, NoticeLevel, Notifier};

/// Prints notices to the terminal: successes on stdout, errors on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn render(notice: &Notice) -> String {
        match notice.level {
            NoticeLevel::Success => format!("ok: {}", notice.message),
            NoticeLevel::Error => format!("error: {}", notice.message),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        let line = Self::render(&notice);
        match notice.level {
            NoticeLevel::Success => println!("{line}"),
            NoticeLevel::Error => eprintln!("{line}"),
        }
    }
}
