//! Customer-facing messages. Shown verbatim in the German checkout.

pub const ADDRESS_NOT_FOUND: &str =
    "Die Adresse konnte nicht gefunden werden. Bitte überprüfen Sie Ihre Eingabe.";

pub const ADDRESS_UNVERIFIABLE: &str =
    "Entschuldigung, wir konnten Ihre Adresse nicht validieren. Bitte überprüfen Sie Ihre Eingabe.";

pub const INCOMPLETE_STREET: &str =
    "Bitte geben Sie eine vollständige Straßenadresse mit Hausnummer ein";

pub const OUTSIDE_DELIVERY_AREA: &str = "Adresse liegt außerhalb des Liefergebiets";

pub const INVALID_POSTAL_CODE: &str = "Bitte geben Sie eine gültige Postleitzahl ein (5 Ziffern)";

pub const STANDARD_FEE: &str = "Lieferung möglich - Standardliefergebühr (20€)";

pub const EXTENDED_FEE: &str = "Lieferung möglich - Erweiterte Liefergebühr (30€)";

pub const LOOKUP_FAILED: &str =
    "Fehler bei der Überprüfung der Lieferadresse. Bitte versuchen Sie es erneut.";

pub const RATE_LIMITED: &str =
    "Zu viele Anfragen. Bitte versuchen Sie es in einer Minute erneut.";
