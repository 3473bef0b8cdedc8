//! Form page
//!
//! One rendered page: the document, its wizard when the page has an add form,
//! and the event handlers of the page widgets. Handlers never fail on missing
//! markup; they skip the update instead.

use std::path::Path;
use std::sync::Arc;

use formstep_dom::{Document, DocumentTree, Element};
use formstep_widgets::notification::{divider_id, item_id, message_id};
use formstep_widgets::{
    create_ability_disabled, csrf_token, Access, AjaxRequest, BadgeUpdate, Key, SearchOption,
    UnreadCount, READ_CLASS,
};

use crate::config::Config;
use crate::wizard::WizardHandle;
use crate::Result;

pub struct FormPage {
    config: Arc<Config>,
    document: Document,
    wizard: Option<WizardHandle>,
}

impl FormPage {
    pub fn load(html: &str, config: Config) -> Self {
        let document = Document::parse(html);
        let wizard = WizardHandle::attach(&document, &config);

        Self {
            config: Arc::new(config),
            document,
            wizard,
        }
    }

    pub fn open<P: AsRef<Path>>(path: P, config: Config) -> Result<Self> {
        let html = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "Loading page");
        Ok(Self::load(&html, config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn wizard(&self) -> Option<&WizardHandle> {
        self.wizard.as_ref()
    }

    // === Description counter ===

    /// Key pressed in the description field. Returns the new label when it
    /// changed.
    pub fn on_description_key(&self, key: Key) -> Option<String> {
        let ids = &self.config.ids;
        self.document.with_tree_mut(|tree| {
            let description = tree.get(tree.by_id(&ids.description)?)?;
            let current = description
                .value
                .as_deref()
                .unwrap_or(description.text.as_str())
                .encode_utf16()
                .count();

            let count = self.config.counter.on_key(key, current)?;
            let label = self.config.counter.label(count);

            let counter = tree.by_id(&ids.char_count)?;
            tree.element_mut(counter).ok()?.text = label.clone();
            Some(label)
        })
    }

    // === Access / state select ===

    /// Access select changed: hide the states the new access level forbids.
    pub fn on_access_changed(&self, value: &str) -> Result<()> {
        let access: Access = value.parse()?;
        let visibility = access.state_visibility();

        self.document.with_tree_mut(|tree| {
            let Some(select) = tree.by_id(&self.config.ids.state) else {
                return;
            };
            for (option, visible) in tree.children(select).into_iter().zip(visibility) {
                if let Ok(el) = tree.element_mut(option) {
                    el.set_display(if visible { "block" } else { "none" });
                }
            }
        });

        tracing::debug!(access = %access, "Filtered publication states");
        Ok(())
    }

    // === Objective form ===

    pub fn on_existing_ability_changed(&self, selected: &str) {
        let ids = &self.config.ids;
        self.document.with_tree_mut(|tree| {
            if let Some(select) = tree.by_id(&ids.existing_ability) {
                if let Ok(el) = tree.element_mut(select) {
                    el.value = Some(selected.to_string());
                }
            }
            if let Some(input) = tree.by_id(&ids.ability) {
                if let Ok(el) = tree.element_mut(input) {
                    el.disabled = create_ability_disabled(selected);
                }
            }
        });
    }

    // === Notifications ===

    /// Apply a `{"unread": n}` answer to the notification counter
    pub fn apply_unread_response(&self, body: &str) -> Result<BadgeUpdate> {
        let update = UnreadCount::parse(body)?.badge();
        self.document
            .with_tree_mut(|tree| apply_badge(tree, &self.config.ids.notification_counter, update));
        Ok(update)
    }

    /// Grey out a notification and describe the request marking it read
    pub fn mark_notification_read(
        &self,
        notification_id: u64,
        cookie_header: &str,
    ) -> Result<AjaxRequest> {
        let request = self
            .config
            .endpoints()?
            .mark_read(notification_id, csrf_token(cookie_header).as_deref())?;

        self.document.with_tree_mut(|tree| {
            if let Some(message) = tree.by_id(&message_id(notification_id)) {
                if let Ok(el) = tree.element_mut(message) {
                    el.add_class(READ_CLASS);
                }
            }
        });

        Ok(request)
    }

    /// The read request succeeded
    pub fn on_notification_read(&self) {
        self.document.with_tree_mut(|tree| {
            apply_badge(tree, &self.config.ids.notification_counter, BadgeUpdate::Remove)
        });
    }

    pub fn delete_notification_request(
        &self,
        notification_id: u64,
        cookie_header: &str,
    ) -> Result<AjaxRequest> {
        Ok(self
            .config
            .endpoints()?
            .delete_notification(notification_id, csrf_token(cookie_header).as_deref())?)
    }

    /// The delete request succeeded with `body`: update the counter, drop the
    /// notification and its divider, and the dropdown once it is empty.
    pub fn on_notification_deleted(&self, notification_id: u64, body: &str) -> Result<()> {
        let update = UnreadCount::parse(body)?.badge();
        let ids = &self.config.ids;

        self.document.with_tree_mut(|tree| {
            apply_badge(tree, &ids.notification_counter, update);

            for id in [item_id(notification_id), divider_id(notification_id)] {
                if let Some(node) = tree.by_id(&id) {
                    if let Err(e) = tree.remove(node) {
                        tracing::debug!(id = %id, error = %e, "Skipping notification removal");
                    }
                }
            }

            if let Some(dropdown) = tree.by_id(&ids.notifications_dropdown) {
                if tree.children(dropdown).is_empty() {
                    if let Err(e) = tree.remove(dropdown) {
                        tracing::debug!(error = %e, "Skipping dropdown removal");
                    }
                }
            }
        });

        tracing::debug!(notification_id, "Notification removed");
        Ok(())
    }

    // === User search ===

    pub fn user_search_request(&self, query: &str) -> Result<AjaxRequest> {
        Ok(self.config.endpoints()?.search_users(query)?)
    }

    /// Replace the suggestions of the username datalist. Returns how many
    /// options are shown.
    pub fn apply_user_search(&self, body: &str) -> Result<usize> {
        let options = SearchOption::from_response(body)?;

        let shown = self.document.with_tree_mut(|tree| -> Result<usize> {
            let Some(list) = tree.by_id(&self.config.ids.user_list) else {
                return Ok(0);
            };
            tree.clear_children(list)?;
            for option in &options {
                tree.append_child(list, Element::option(&option.value, &option.label))?;
            }
            Ok(options.len())
        })?;

        Ok(shown)
    }
}

fn apply_badge(tree: &mut DocumentTree, counter_id: &str, update: BadgeUpdate) {
    let Some(counter) = tree.by_id(counter_id) else {
        return;
    };
    match update {
        BadgeUpdate::Show(unread) => {
            if let Ok(el) = tree.element_mut(counter) {
                el.text = unread.to_string();
            }
        }
        BadgeUpdate::Remove => {
            if let Err(e) = tree.remove(counter) {
                tracing::debug!(error = %e, "Skipping counter removal");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use formstep_widgets::{Method, WidgetError};

    const PAGE: &str = r#"
        <html><body>
          <nav>
            <span id="notification_counter">2</span>
            <div id="notifications_dropdown">
              <a id="notification_4"><span id="notification_4_message">Welcome</span></a>
              <hr id="notification_divider_4">
              <a id="notification_5"><span id="notification_5_message">New course</span></a>
            </div>
          </nav>
          <form name="object_add_form" id="resource_add_form">
            <ol id="resource_form_progress_bar" style="display: none">
              <li class="progress_tab"></li><li class="progress_tab"></li>
            </ol>
            <div class="object_form_tab">
              <textarea id="id_description">Hello</textarea>
              <small id="nb_char"></small>
              <select id="id_access">
                <option value="PUBLIC">Public</option>
                <option value="PRIVATE">Private</option>
              </select>
              <select id="id_state">
                <option value="DRAFT">Draft</option>
                <option value="PUBLISHED">Published</option>
                <option value="ARCHIVED">Archived</option>
              </select>
            </div>
            <div class="object_form_tab">
              <select id="id_existing_ability"><option value="">New</option></select>
              <input id="id_ability">
              <input id="id_username" list="user_list">
              <datalist id="user_list"><option value="old"></option></datalist>
            </div>
            <button id="previous_tab_btn">Previous</button>
            <button id="next_tab_btn">Next</button>
            <button id="add_resource_submit_button">Add</button>
          </form>
        </body></html>
    "#;

    fn page() -> FormPage {
        FormPage::load(PAGE, Config::default())
    }

    fn element(page: &FormPage, id: &str) -> Option<Element> {
        page.document()
            .with_tree(|tree| tree.by_id(id).and_then(|node| tree.get(node)).cloned())
    }

    #[test]
    fn test_wizard_attached_to_page() {
        let page = page();
        let wizard = page.wizard().unwrap();
        assert_eq!(wizard.context(), formstep_wizard::FormContext::Resource);
        assert_eq!(
            element(&page, "resource_form_progress_bar")
                .unwrap()
                .display
                .as_deref(),
            Some("block")
        );

        assert!(wizard.next());
        assert!(wizard.next());
        let submit = element(&page, "add_resource_submit_button").unwrap();
        assert_eq!(submit.display.as_deref(), Some("block"));
    }

    #[test]
    fn test_description_counter() {
        let page = page();
        assert_eq!(
            page.on_description_key(Key::Printable).as_deref(),
            Some("6 characters")
        );
        assert_eq!(element(&page, "nb_char").unwrap().text, "6 characters");
        assert_eq!(
            page.on_description_key(Key::Backspace).as_deref(),
            Some("4 characters")
        );
        assert_eq!(page.on_description_key(Key::Other), None);
    }

    fn description_page(description: &str) -> FormPage {
        let html = format!(
            r#"<textarea id="id_description">{description}</textarea><small id="nb_char"></small>"#
        );
        FormPage::load(&html, Config::default())
    }

    #[test]
    fn test_description_counter_keeps_surrounding_whitespace() {
        let page = description_page("Hi  ");
        assert_eq!(
            page.on_description_key(Key::Printable).as_deref(),
            Some("5 characters")
        );
    }

    #[test]
    fn test_description_counter_counts_utf16_units() {
        let page = description_page("ok \u{1F600}");
        assert_eq!(
            page.on_description_key(Key::Printable).as_deref(),
            Some("6 characters")
        );
    }

    #[test]
    fn test_access_filters_states() {
        let page = page();
        page.on_access_changed("PRIVATE").unwrap();

        let displays: Vec<Option<String>> = page.document().with_tree(|tree| {
            let select = tree.by_id("id_state").unwrap();
            tree.children(select)
                .into_iter()
                .map(|node| tree.get(node).unwrap().display.clone())
                .collect()
        });
        assert_eq!(
            displays,
            vec![
                Some("block".to_string()),
                Some("none".to_string()),
                Some("block".to_string())
            ]
        );

        assert!(matches!(
            page.on_access_changed("NOBODY"),
            Err(CoreError::Widget(WidgetError::UnknownAccess(_)))
        ));
    }

    #[test]
    fn test_existing_ability_toggle() {
        let page = page();
        page.on_existing_ability_changed("3");
        assert!(element(&page, "id_ability").unwrap().disabled);
        page.on_existing_ability_changed("");
        assert!(!element(&page, "id_ability").unwrap().disabled);
    }

    #[test]
    fn test_unread_counter() {
        let page = page();
        assert_eq!(
            page.apply_unread_response(r#"{"unread": 1}"#).unwrap(),
            BadgeUpdate::Show(1)
        );
        assert_eq!(element(&page, "notification_counter").unwrap().text, "1");

        page.apply_unread_response(r#"{"unread": 0}"#).unwrap();
        assert!(element(&page, "notification_counter").is_none());

        assert!(page.apply_unread_response("oops").is_err());
    }

    #[test]
    fn test_mark_read() {
        let page = page();
        let request = page.mark_notification_read(4, "csrftoken=abc123").unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url.path(), "/accounts/ajax/notification/read/4");
        assert!(element(&page, "notification_4_message")
            .unwrap()
            .has_class("text-muted"));

        page.on_notification_read();
        assert!(element(&page, "notification_counter").is_none());

        assert!(matches!(
            page.mark_notification_read(5, "sessionid=x"),
            Err(CoreError::Widget(WidgetError::MissingCsrfToken))
        ));
    }

    #[test]
    fn test_delete_notifications_until_dropdown_is_gone() {
        let page = page();
        let request = page.delete_notification_request(4, "csrftoken=abc").unwrap();
        assert_eq!(request.url.path(), "/accounts/ajax/notification/delete/4");

        page.on_notification_deleted(4, r#"{"unread": 1}"#).unwrap();
        assert!(element(&page, "notification_4").is_none());
        assert!(element(&page, "notification_divider_4").is_none());
        assert!(element(&page, "notifications_dropdown").is_some());
        assert_eq!(element(&page, "notification_counter").unwrap().text, "1");

        page.on_notification_deleted(5, r#"{"unread": 0}"#).unwrap();
        assert!(element(&page, "notifications_dropdown").is_none());
        assert!(element(&page, "notification_counter").is_none());
    }

    #[test]
    fn test_user_search() {
        let page = page();
        let request = page.user_search_request("ada").unwrap();
        assert_eq!(request.url.query(), Some("user=ada"));

        let shown = page
            .apply_user_search(
                r#"[{"username": "ada", "first_name": "Ada", "last_name": "Lovelace"}]"#,
            )
            .unwrap();
        assert_eq!(shown, 1);

        let options: Vec<Element> = page.document().with_tree(|tree| {
            let list = tree.by_id("user_list").unwrap();
            tree.children(list)
                .into_iter()
                .filter_map(|node| tree.get(node).cloned())
                .collect()
        });
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value.as_deref(), Some("ada"));
        assert_eq!(options[0].label.as_deref(), Some("Ada Lovelace (@ada)"));
    }

    #[test]
    fn test_page_without_widgets() {
        let page = FormPage::load("<p>plain</p>", Config::default());
        assert!(page.wizard().is_none());
        assert_eq!(page.on_description_key(Key::Printable), None);
        page.on_existing_ability_changed("1");
        page.on_access_changed("PUBLIC").unwrap();
        assert_eq!(page.apply_user_search("[]").unwrap(), 0);
        page.on_notification_deleted(1, r#"{"unread": 0}"#).unwrap();
    }
}
