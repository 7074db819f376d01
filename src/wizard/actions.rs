use super::*;

impl QuizWizard {
    /// Sobrescribe un campo de valor único.
    ///
    /// En selecciones únicas `value` tiene que ser una de las opciones; URL y
    /// texto libre aceptan cualquier cosa (sin validación de formato).
    pub fn set_single_value(&mut self, field: Field, value: impl Into<String>) -> Result<(), QuizError> {
        let value = value.into();
        match field.kind() {
            FieldKind::SingleChoice => {
                self.ensure_option(field, &value)?;
                log::debug!("{field} = {value:?}");
                if let Some(slot) = self.answers.choice_mut(field) {
                    *slot = Some(value);
                }
                Ok(())
            }
            FieldKind::Url | FieldKind::FreeText => {
                if let Some(slot) = self.answers.text_mut(field) {
                    *slot = value;
                }
                Ok(())
            }
            _ => Err(Self::kind_mismatch(field, "set_single_value")),
        }
    }

    /// Quita `value` si ya estaba seleccionado, si no lo añade.
    /// Devuelve si queda seleccionado.
    pub fn toggle_set_member(&mut self, field: Field, value: &str) -> Result<bool, QuizError> {
        Self::ensure_kind(field, &[FieldKind::MultiChoice], "toggle_set_member")?;
        self.ensure_option(field, value)?;

        let Some(set) = self.answers.selections_mut(field) else {
            return Err(Self::kind_mismatch(field, "toggle_set_member"));
        };
        let selected = match set.iter().position(|v| v == value) {
            Some(pos) => {
                set.remove(pos);
                false
            }
            None => {
                set.push(value.to_owned());
                true
            }
        };
        log::debug!("{field} {} {value:?}", if selected { "+" } else { "-" });
        Ok(selected)
    }

    pub fn set_link_at(&mut self, field: Field, index: usize, value: impl Into<String>) -> Result<(), QuizError> {
        Self::ensure_kind(field, &[FieldKind::LinkList], "set_link_at")?;
        let Some(links) = self.answers.links_mut(field) else {
            return Err(Self::kind_mismatch(field, "set_link_at"));
        };
        let len = links.len();
        match links.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => {
                let err = QuizError::IndexOutOfRange { field, index, len };
                log::warn!("{err}");
                Err(err)
            }
        }
    }

    /// Añade una entrada vacía al final. Devuelve la nueva longitud.
    pub fn append_link(&mut self, field: Field) -> Result<usize, QuizError> {
        Self::ensure_kind(field, &[FieldKind::LinkList], "append_link")?;
        let Some(links) = self.answers.links_mut(field) else {
            return Err(Self::kind_mismatch(field, "append_link"));
        };
        links.push(String::new());
        log::debug!("{field}: {} entries", links.len());
        Ok(links.len())
    }

    fn ensure_option(&self, field: Field, value: &str) -> Result<(), QuizError> {
        let known = self
            .question(field)
            .map(|q| q.has_option(value))
            .unwrap_or(false);
        if known {
            return Ok(());
        }
        let err = QuizError::UnknownOption {
            field,
            value: value.to_owned(),
        };
        log::warn!("{err}");
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::wizard;
    use super::*;

    #[test]
    fn single_choice_is_last_write_wins() {
        let mut w = wizard();
        w.set_single_value(Field::Coverage, "Light").unwrap();
        w.set_single_value(Field::Coverage, "Full").unwrap();
        assert_eq!(w.answers().coverage.as_deref(), Some("Full"));
        assert!(w.answers().is_answered(Field::Coverage));
    }

    #[test]
    fn single_choice_rejects_values_outside_its_options() {
        let mut w = wizard();
        w.set_single_value(Field::SkinTone, "Medium").unwrap();
        let err = w.set_single_value(Field::SkinTone, "Purple").unwrap_err();
        assert!(matches!(err, QuizError::UnknownOption { field: Field::SkinTone, .. }));
        assert_eq!(w.answers().skin_tone.as_deref(), Some("Medium"));
    }

    #[test]
    fn free_text_and_url_accept_anything() {
        let mut w = wizard();
        w.set_single_value(Field::PinterestBoard, "not a url").unwrap();
        w.set_single_value(Field::BrandsToAvoid, "Brand A, Brand B").unwrap();
        assert_eq!(w.answers().pinterest_board, "not a url");
        assert_eq!(w.answers().brands_to_avoid, "Brand A, Brand B");
    }

    #[test]
    fn set_single_value_rejects_sets_and_link_lists() {
        let mut w = wizard();
        assert!(matches!(
            w.set_single_value(Field::SkinType, "Oily"),
            Err(QuizError::FieldKindMismatch { .. })
        ));
        assert!(matches!(
            w.set_single_value(Field::TiktokLinks, "x"),
            Err(QuizError::FieldKindMismatch { .. })
        ));
        assert_eq!(w.answers(), &QuizState::default());
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut w = wizard();
        w.toggle_set_member(Field::SkinConcerns, "Redness").unwrap();
        for field in Field::ALL.into_iter().filter(|f| f.kind() == FieldKind::MultiChoice) {
            let options = w.definition().question(field).unwrap().options.clone();
            for option in options {
                let before = w.answers().clone();
                w.toggle_set_member(field, &option).unwrap();
                assert_ne!(w.answers(), &before);
                w.toggle_set_member(field, &option).unwrap();
                assert_eq!(w.answers(), &before, "{field} / {option}");
            }
        }
    }

    #[test]
    fn toggling_oily_dry_oily_leaves_dry() {
        let mut w = wizard();
        assert!(w.toggle_set_member(Field::SkinType, "Oily").unwrap());
        assert!(w.toggle_set_member(Field::SkinType, "Dry").unwrap());
        assert!(!w.toggle_set_member(Field::SkinType, "Oily").unwrap());
        assert_eq!(w.answers().skin_type, vec!["Dry"]);
        assert!(w.answers().is_selected(Field::SkinType, "Dry"));
        assert!(!w.answers().is_selected(Field::SkinType, "Oily"));
    }

    #[test]
    fn toggle_rejects_unknown_option_and_wrong_kind() {
        let mut w = wizard();
        assert!(matches!(
            w.toggle_set_member(Field::SkinType, "Scaly"),
            Err(QuizError::UnknownOption { .. })
        ));
        assert!(matches!(
            w.toggle_set_member(Field::SkinTone, "Medium"),
            Err(QuizError::FieldKindMismatch { .. })
        ));
        assert!(w.answers().skin_type.is_empty());
        assert!(w.answers().skin_tone.is_none());
    }

    #[test]
    fn set_link_at_edits_in_place_and_accepts_blank() {
        let mut w = wizard();
        w.set_link_at(Field::TiktokLinks, 1, "https://tiktok.com/a").unwrap();
        w.set_link_at(Field::TiktokLinks, 1, "").unwrap();
        w.set_link_at(Field::InstagramLinks, 0, "whatever").unwrap();
        assert_eq!(w.answers().tiktok_links, vec!["", "", ""]);
        assert_eq!(w.answers().instagram_links, vec!["whatever", ""]);
    }

    #[test]
    fn set_link_at_out_of_range_fails() {
        let mut w = wizard();
        let err = w.set_link_at(Field::InstagramLinks, 2, "x").unwrap_err();
        match err {
            QuizError::IndexOutOfRange { field, index, len } => {
                assert_eq!(field, Field::InstagramLinks);
                assert_eq!(index, 2);
                assert_eq!(len, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(w.answers().instagram_links.len(), 2);
    }

    #[test]
    fn append_link_grows_by_one_and_keeps_entries() {
        let mut w = wizard();
        w.set_link_at(Field::TiktokLinks, 0, "a").unwrap();
        w.set_link_at(Field::TiktokLinks, 2, "c").unwrap();
        assert_eq!(w.append_link(Field::TiktokLinks).unwrap(), 4);
        assert_eq!(w.answers().tiktok_links, vec!["a", "", "c", ""]);

        w.set_link_at(Field::TiktokLinks, 3, "d").unwrap();
        assert_eq!(w.answers().tiktok_links[3], "d");
        assert!(matches!(
            w.append_link(Field::PinterestBoard),
            Err(QuizError::FieldKindMismatch { .. })
        ));
    }
}
