// Contact page behaviour: the submission state machine, the EmailJS delivery
// collaborator, and clipboard copy for the email rows.

pub mod clipboard;
pub mod emailjs;
pub mod flow;
