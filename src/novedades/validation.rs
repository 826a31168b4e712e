use super::model::NoticeForm;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

lazy_static! {
    static ref ONLY_LETTERS: Regex =
        Regex::new(r"^[A-Za-zÁÉÍÓÚáéíóúÑñ\s]+$").expect("Failed to create letters regex");
    static ref ONLY_SCHEDULE_CHARS: Regex =
        Regex::new(r"^[0-9: -]+$").expect("Failed to create schedule regex");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("El campo \"Novedad\" solo acepta letras.")]
    InvalidName,
    #[error("El campo \"Lugar\" solo acepta letras.")]
    InvalidPlace,
    #[error("El campo \"Horario\" solo acepta números y caracteres especiales (: -).")]
    InvalidSchedule,
    #[error("Completa la fecha de finalización.")]
    MissingEndDate,
    #[error("El campo \"Detalles\" no puede estar vacío.")]
    EmptyDetails,
}

/// Checks the create form. The first failing rule wins.
pub fn validate_new(form: &NoticeForm) -> Result<(), ValidationError> {
    validate_common(form)?;

    if form.details.trim().is_empty() {
        return Err(ValidationError::EmptyDetails);
    }

    Ok(())
}

/// Checks the edit form, which does not require details.
pub fn validate_edit(form: &NoticeForm) -> Result<(), ValidationError> {
    validate_common(form)?;

    if form.details.trim().is_empty() {
        warn!("Saving an edited notice with empty details (allowed on edit, rejected on creation)");
    }

    Ok(())
}

fn validate_common(form: &NoticeForm) -> Result<(), ValidationError> {
    if !ONLY_LETTERS.is_match(&form.name) {
        return Err(ValidationError::InvalidName);
    }
    if !ONLY_LETTERS.is_match(&form.place) {
        return Err(ValidationError::InvalidPlace);
    }
    if !ONLY_SCHEDULE_CHARS.is_match(&form.schedule) {
        return Err(ValidationError::InvalidSchedule);
    }
    if form.end_date.is_empty() {
        return Err(ValidationError::MissingEndDate);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> NoticeForm {
        NoticeForm {
            name: "Reunión mensual".to_string(),
            place: "Oficina Ñuñoa".to_string(),
            schedule: "09:00 - 10:30".to_string(),
            end_date: "2024-01-01".to_string(),
            details: "Traer portátil".to_string(),
        }
    }

    #[test_log::test]
    fn a_valid_form_should_pass_both_validations() {
        assert_eq!(validate_new(&valid_form()), Ok(()));
        assert_eq!(validate_edit(&valid_form()), Ok(()));
    }

    #[test_log::test]
    fn names_with_digits_or_symbols_should_be_rejected() {
        for name in ["Reunion 2", "Reunion!", "Café-bar", "R2D2", "", "a_b"] {
            let form = NoticeForm {
                name: name.to_string(),
                ..valid_form()
            };

            assert_eq!(validate_new(&form), Err(ValidationError::InvalidName), "{}", name);
            assert_eq!(validate_edit(&form), Err(ValidationError::InvalidName), "{}", name);
        }
    }

    #[test_log::test]
    fn places_with_digits_or_symbols_should_be_rejected() {
        for place in ["Calle 5", "Oficina#", "Sala.B"] {
            let form = NoticeForm {
                place: place.to_string(),
                ..valid_form()
            };

            assert_eq!(validate_new(&form), Err(ValidationError::InvalidPlace), "{}", place);
        }
    }

    #[test_log::test]
    fn schedules_with_letters_should_be_rejected() {
        for schedule in ["16h", "a las 9", "09:00 am", "x"] {
            let form = NoticeForm {
                schedule: schedule.to_string(),
                ..valid_form()
            };

            assert_eq!(
                validate_new(&form),
                Err(ValidationError::InvalidSchedule),
                "{}",
                schedule
            );
        }
    }

    #[test_log::test]
    fn a_missing_end_date_should_always_be_rejected() {
        let form = NoticeForm {
            end_date: String::new(),
            ..valid_form()
        };

        assert_eq!(validate_new(&form), Err(ValidationError::MissingEndDate));
        assert_eq!(validate_edit(&form), Err(ValidationError::MissingEndDate));
    }

    #[test_log::test]
    fn blank_details_should_only_be_rejected_on_creation() {
        let form = NoticeForm {
            details: "   ".to_string(),
            ..valid_form()
        };

        assert_eq!(validate_new(&form), Err(ValidationError::EmptyDetails));
        assert_eq!(validate_edit(&form), Ok(()));
    }

    #[test_log::test]
    fn the_first_failing_rule_should_win() {
        let form = NoticeForm {
            name: "1".to_string(),
            place: "2".to_string(),
            schedule: "abc".to_string(),
            end_date: String::new(),
            details: String::new(),
        };

        assert_eq!(validate_new(&form), Err(ValidationError::InvalidName));

        let form = NoticeForm {
            name: "Taller".to_string(),
            ..form
        };

        assert_eq!(validate_new(&form), Err(ValidationError::InvalidPlace));
    }

    #[test_log::test]
    fn error_messages_should_match_the_user_facing_alerts() {
        assert_eq!(
            ValidationError::InvalidName.to_string(),
            "El campo \"Novedad\" solo acepta letras."
        );
        assert_eq!(
            ValidationError::MissingEndDate.to_string(),
            "Completa la fecha de finalización."
        );
    }
}
