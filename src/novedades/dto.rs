use super::model::{Notice, NoticeForm};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

// Note: text fields use the custom deserializer since the backend may omit them or send null
#[derive(Debug, Deserialize)]
pub struct ActividadResponse {
    #[serde(rename = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub nombre: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub lugar: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub horario: String,
    #[serde(default, rename = "fechaFin", deserialize_with = "deserialize_str")]
    pub fecha_fin: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub detalles: String,
}

impl ActividadResponse {
    pub fn to_model(&self) -> Notice {
        Notice::new(
            self.id.to_string(),
            self.nombre.to_string(),
            self.lugar.to_string(),
            self.horario.to_string(),
            self.fecha_fin.to_string(),
            self.detalles.to_string(),
        )
    }
}

/// Body of both the creation and the update requests
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActividadRequest<'a> {
    pub nombre: &'a str,
    pub lugar: &'a str,
    pub horario: &'a str,
    pub fecha_fin: &'a str,
    pub detalles: &'a str,
}

impl<'a> From<&'a NoticeForm> for ActividadRequest<'a> {
    fn from(form: &'a NoticeForm) -> Self {
        Self {
            nombre: &form.name,
            lugar: &form.place,
            horario: &form.schedule,
            fecha_fin: &form.end_date,
            detalles: &form.details,
        }
    }
}

fn deserialize_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => {
            warn!("Expected a string, found '{}' (using it as text)", other);
            other.to_string()
        }
    })
}

fn deserialize_id<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(d)? {
        Value::String(s) if !s.is_empty() => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("invalid notice id: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_deserialize_a_complete_notice() {
        let dto = serde_json::from_str::<Vec<ActividadResponse>>(
            r##"
              [{
                "_id": "66a1f0c2e4b0a1b2c3d4e5f6",
                "nombre": "Reunión de equipo",
                "lugar": "Sala Ñandú",
                "horario": "16:00",
                "fechaFin": "2025-02-22T00:00:00.000Z",
                "detalles": "Traer el informe",
                "__v": 0
              }]"##,
        );

        assert!(dto.is_ok(), "{:?}", dto);

        let dto = dto.unwrap();

        assert_eq!(dto.len(), 1);

        let notice = dto.first().unwrap().to_model();

        assert_eq!(notice.id, "66a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(notice.name, "Reunión de equipo");
        assert_eq!(notice.place, "Sala Ñandú");
        assert_eq!(notice.schedule, "16:00");
        assert_eq!(notice.end_day(), "2025-02-22");
        assert_eq!(notice.details, "Traer el informe");
    }

    #[test_log::test]
    fn should_deserialize_a_notice_without_end_date_nor_details() {
        let dto = serde_json::from_str::<ActividadResponse>(
            r##"{ "_id": 7, "nombre": "Taller", "lugar": "Aula", "horario": "10:00", "fechaFin": null }"##,
        );

        assert!(dto.is_ok(), "{:?}", dto);

        let notice = dto.unwrap().to_model();

        assert_eq!(notice.id, "7");
        assert_eq!(notice.end_date, "");
        assert_eq!(notice.details, "");
    }

    #[test_log::test]
    fn should_reject_a_notice_without_id() {
        let dto = serde_json::from_str::<ActividadResponse>(r##"{ "nombre": "Taller" }"##);

        assert!(dto.is_err());
    }

    #[test_log::test]
    fn should_serialize_the_request_with_backend_field_names() {
        let form = NoticeForm {
            name: "Taller".to_string(),
            place: "Aula".to_string(),
            schedule: "10:00".to_string(),
            end_date: "2025-05-03".to_string(),
            details: "Con inscripción".to_string(),
        };

        let body = serde_json::to_value(ActividadRequest::from(&form)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "nombre": "Taller",
                "lugar": "Aula",
                "horario": "10:00",
                "fechaFin": "2025-05-03",
                "detalles": "Con inscripción"
            })
        );
    }
}
