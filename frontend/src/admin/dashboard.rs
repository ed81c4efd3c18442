use std::rc::Rc;

use chrono::NaiveDate;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::models::{ContactRecord, SettingRecord, ShowcaseRecord};
use crate::api::{ApiClient, ApiError};
use crate::cases::CaseStudy;
use crate::components::case_card::CaseCard;
use crate::i18n::{localized_href, use_locale};
use crate::Route;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Showcases,
    Contacts,
    Settings,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Showcases, Tab::Contacts, Tab::Settings];

    fn label(self) -> &'static str {
        match self {
            Tab::Showcases => "Showcases",
            Tab::Contacts => "Contacts",
            Tab::Settings => "Settings",
        }
    }
}

#[derive(Clone, PartialEq)]
struct DeleteModalState {
    show: bool,
    contact_id: Option<u64>,
    contact_name: Option<String>,
}

impl DeleteModalState {
    fn closed() -> Self {
        Self { show: false, contact_id: None, contact_name: None }
    }
}

/// Contacts shown in the table. Updates go through the reducer so responses
/// that land together each apply to the latest list.
#[derive(Debug, Clone, Default, PartialEq)]
struct ContactList {
    contacts: Vec<ContactRecord>,
}

enum ContactListAction {
    Replace(Vec<ContactRecord>),
    MarkRead(u64),
    Remove(u64),
}

impl ContactList {
    fn apply(&self, action: ContactListAction) -> Self {
        let contacts = match action {
            ContactListAction::Replace(contacts) => contacts,
            ContactListAction::MarkRead(id) => self
                .contacts
                .iter()
                .cloned()
                .map(|c| if c.id == id { ContactRecord { read: true, ..c } } else { c })
                .collect(),
            ContactListAction::Remove(id) => self.contacts.iter().filter(|c| c.id != id).cloned().collect(),
        };
        Self { contacts }
    }
}

impl Reducible for ContactList {
    type Action = ContactListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

fn report(error: &UseStateHandle<Option<String>>, context: &str, err: ApiError) {
    error!("{}: {}", context, err);
    error.set(Some(format!("{}: {}", context, err)));
}

fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

#[function_component]
pub fn AdminDashboard() -> Html {
    let tab = use_state(|| Tab::Showcases);
    let error = use_state(|| None::<String>);

    html! {
        <div class="dashboard-container">
            <div class="dashboard-panel">
                <div class="panel-header">
                    <h1 class="panel-title">{"Admin Dashboard"}</h1>
                    <Link<Route> to={Route::Home} classes="back-link">
                        {"Back to Home"}
                    </Link<Route>>
                </div>
                <div class="dashboard-tabs">
                    { for Tab::ALL.into_iter().map(|t| {
                        let onclick = {
                            let tab = tab.clone();
                            let error = error.clone();
                            Callback::from(move |_: MouseEvent| {
                                error.set(None);
                                tab.set(t);
                            })
                        };
                        html! {
                            <button class={classes!("tab-button", (*tab == t).then_some("active"))} {onclick}>
                                { t.label() }
                            </button>
                        }
                    }) }
                </div>
                if let Some(message) = (*error).clone() {
                    <div class="dashboard-error">{ message }</div>
                }
                {
                    match *tab {
                        Tab::Showcases => html! { <ShowcasesTab error={error.clone()} /> },
                        Tab::Contacts => html! { <ContactsTab error={error.clone()} /> },
                        Tab::Settings => html! { <SettingsTab error={error.clone()} /> },
                    }
                }
            </div>
            <style>
                {r#"
                .dashboard-container {
                    min-height: 100vh;
                    padding: 48px 24px;
                    background: #0a0a0a;
                    color: #fff;
                    font-family: 'Inter', -apple-system, sans-serif;
                }
                .dashboard-panel {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .panel-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 32px;
                }
                .panel-title {
                    font-weight: 300;
                    margin: 0;
                }
                .back-link {
                    color: #60a5fa;
                    text-decoration: none;
                }
                .dashboard-tabs {
                    display: flex;
                    gap: 8px;
                    margin-bottom: 24px;
                }
                .tab-button,
                .iq-button {
                    padding: 8px 16px;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: transparent;
                    color: #fff;
                    cursor: pointer;
                }
                .tab-button.active {
                    background: #fff;
                    color: #000;
                }
                .iq-button.delete,
                .modal-button.delete {
                    border-color: rgba(248, 113, 113, 0.5);
                    color: #f87171;
                }
                .dashboard-error {
                    padding: 12px 16px;
                    margin-bottom: 24px;
                    border-radius: 8px;
                    background: rgba(248, 113, 113, 0.1);
                    color: #fca5a5;
                }
                .dashboard-toolbar {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 12px;
                    align-items: center;
                    margin-bottom: 24px;
                }
                .dashboard-toolbar input {
                    padding: 8px 12px;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.05);
                    color: #fff;
                }
                .dashboard-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                    gap: 24px;
                }
                .users-table {
                    width: 100%;
                    border-collapse: collapse;
                }
                .users-table th,
                .users-table td {
                    padding: 12px;
                    text-align: left;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    font-weight: 300;
                }
                .empty-state {
                    color: rgba(255, 255, 255, 0.5);
                }
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.7);
                }
                .modal-content {
                    padding: 32px;
                    border-radius: 16px;
                    background: #171717;
                }
                .modal-content .warning {
                    color: #f87171;
                }
                .modal-buttons {
                    display: flex;
                    gap: 12px;
                    justify-content: flex-end;
                }
                .modal-button {
                    padding: 8px 16px;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: transparent;
                    color: #fff;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TabProps {
    error: UseStateHandle<Option<String>>,
}

#[function_component]
fn ShowcasesTab(props: &TabProps) -> Html {
    let locale = use_locale();
    let showcases = use_state(Vec::<CaseStudy>::new);

    {
        let showcases = showcases.clone();
        let error = props.error.clone();
        use_effect_with_deps(
            move |locale| {
                let code = locale.code();
                spawn_local(async move {
                    let client = ApiClient::from_config();
                    match client.showcases().published::<Vec<ShowcaseRecord>>(Some(code)).await {
                        Ok(records) => {
                            info!("Loaded {} published showcases", records.len());
                            showcases.set(records.into_iter().map(ShowcaseRecord::into_case_study).collect());
                        }
                        Err(err) => report(&error, "Failed to fetch showcases", err),
                    }
                });
                || ()
            },
            locale,
        );
    }

    html! {
        if showcases.is_empty() {
            <p class="empty-state">{"No published showcases."}</p>
        } else {
            <div class="dashboard-grid">
                { for showcases.iter().map(|case| html! {
                    <CaseCard
                        key={case.slug.clone()}
                        case={case.clone()}
                        href={localized_href(locale, &format!("/cases#{}", case.slug))}
                        cta={"Open"}
                    />
                }) }
            </div>
        }
    }
}

#[function_component]
fn ContactsTab(props: &TabProps) -> Html {
    let contacts = use_reducer(ContactList::default);
    let range_start = use_state(String::new);
    let range_end = use_state(String::new);
    let delete_modal = use_state(DeleteModalState::closed);

    let load_unread = {
        let contacts = contacts.dispatcher();
        let error = props.error.clone();
        Callback::from(move |_: ()| {
            let contacts = contacts.clone();
            let error = error.clone();
            spawn_local(async move {
                let client = ApiClient::from_config();
                match client.contacts().unread::<Vec<ContactRecord>>().await {
                    Ok(data) => contacts.dispatch(ContactListAction::Replace(data)),
                    Err(err) => report(&error, "Failed to fetch contacts", err),
                }
            });
        })
    };

    {
        let load_unread = load_unread.clone();
        use_effect_with_deps(
            move |_| {
                load_unread.emit(());
                || ()
            },
            (),
        );
    }

    let filter_range = {
        let contacts = contacts.dispatcher();
        let error = props.error.clone();
        let range_start = range_start.clone();
        let range_end = range_end.clone();
        Callback::from(move |_: MouseEvent| {
            let (Some(start), Some(end)) = (parse_day(&range_start), parse_day(&range_end)) else {
                error.set(Some("Pick a start and end date".to_string()));
                return;
            };
            let contacts = contacts.clone();
            let error = error.clone();
            spawn_local(async move {
                let client = ApiClient::from_config();
                match client.contacts().by_date_range::<Vec<ContactRecord>>(start, end).await {
                    Ok(data) => {
                        error.set(None);
                        contacts.dispatch(ContactListAction::Replace(data));
                    }
                    Err(err) => report(&error, "Failed to fetch contacts", err),
                }
            });
        })
    };

    let mark_read = {
        let contacts = contacts.dispatcher();
        let error = props.error.clone();
        Callback::from(move |id: u64| {
            let contacts = contacts.clone();
            let error = error.clone();
            spawn_local(async move {
                let client = ApiClient::from_config();
                match client.contacts().mark_as_read::<serde_json::Value>(id).await {
                    Ok(_) => contacts.dispatch(ContactListAction::MarkRead(id)),
                    Err(err) => report(&error, "Failed to mark contact as read", err),
                }
            });
        })
    };

    let confirm_delete = {
        let contacts = contacts.dispatcher();
        let error = props.error.clone();
        let delete_modal = delete_modal.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(id) = delete_modal.contact_id else {
                return;
            };
            let contacts = contacts.clone();
            let error = error.clone();
            let delete_modal = delete_modal.clone();
            spawn_local(async move {
                let client = ApiClient::from_config();
                match client.contacts().delete::<serde_json::Value>(id).await {
                    Ok(_) => {
                        contacts.dispatch(ContactListAction::Remove(id));
                        delete_modal.set(DeleteModalState::closed());
                    }
                    Err(err) => report(&error, "Failed to delete contact", err),
                }
            });
        })
    };

    html! {
        <>
            <div class="dashboard-toolbar">
                <button class="iq-button" onclick={load_unread.reform(|_: MouseEvent| ())}>{"Unread"}</button>
                <input
                    type="date"
                    value={(*range_start).clone()}
                    oninput={{
                        let range_start = range_start.clone();
                        Callback::from(move |e: InputEvent| range_start.set(input_value(&e)))
                    }}
                />
                <input
                    type="date"
                    value={(*range_end).clone()}
                    oninput={{
                        let range_end = range_end.clone();
                        Callback::from(move |e: InputEvent| range_end.set(input_value(&e)))
                    }}
                />
                <button class="iq-button" onclick={filter_range}>{"Filter by date"}</button>
            </div>
            if contacts.contacts.is_empty() {
                <p class="empty-state">{"No contacts."}</p>
            } else {
                <table class="users-table">
                    <thead>
                        <tr>
                            <th>{"Received"}</th>
                            <th>{"Name"}</th>
                            <th>{"Company"}</th>
                            <th>{"Phone"}</th>
                            <th>{"Revenue"}</th>
                            <th>{"Business"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for contacts.contacts.iter().map(|contact| {
                            let id = contact.id;
                            let name = contact.name.clone();
                            html! {
                                <tr key={id}>
                                    <td>{ contact.received_at() }</td>
                                    <td>{ &contact.name }</td>
                                    <td>{ &contact.company }</td>
                                    <td>{ &contact.phone }</td>
                                    <td>{ &contact.revenue }</td>
                                    <td>{ &contact.business_type }</td>
                                    <td>
                                        if !contact.read {
                                            <button class="iq-button" onclick={mark_read.reform(move |_: MouseEvent| id)}>
                                                {"Mark read"}
                                            </button>
                                        }
                                        <button
                                            class="iq-button delete"
                                            onclick={{
                                                let delete_modal = delete_modal.clone();
                                                Callback::from(move |_: MouseEvent| {
                                                    delete_modal.set(DeleteModalState {
                                                        show: true,
                                                        contact_id: Some(id),
                                                        contact_name: Some(name.clone()),
                                                    });
                                                })
                                            }}
                                        >
                                            {"Delete"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            }
            if delete_modal.show {
                <div class="modal-overlay">
                    <div class="modal-content">
                        <h2>{"Confirm Delete"}</h2>
                        <p>{ format!("Delete the contact from {}?", delete_modal.contact_name.clone().unwrap_or_default()) }</p>
                        <p class="warning">{"This action cannot be undone!"}</p>
                        <div class="modal-buttons">
                            <button
                                class="modal-button cancel"
                                onclick={{
                                    let delete_modal = delete_modal.clone();
                                    Callback::from(move |_: MouseEvent| delete_modal.set(DeleteModalState::closed()))
                                }}
                            >
                                {"Cancel"}
                            </button>
                            <button class="modal-button delete" onclick={confirm_delete}>{"Delete"}</button>
                        </div>
                    </div>
                </div>
            }
        </>
    }
}

#[function_component]
fn SettingsTab(props: &TabProps) -> Html {
    let settings = use_state(Vec::<SettingRecord>::new);
    let category = use_state(String::new);

    let load = {
        let settings = settings.clone();
        let error = props.error.clone();
        Callback::from(move |category: String| {
            let settings = settings.clone();
            let error = error.clone();
            spawn_local(async move {
                let client = ApiClient::from_config();
                let api = client.settings();
                let result = if category.trim().is_empty() {
                    api.list::<Vec<SettingRecord>>().await
                } else {
                    api.by_category::<Vec<SettingRecord>>(category.trim()).await
                };
                match result {
                    Ok(data) => settings.set(data),
                    Err(err) => report(&error, "Failed to fetch settings", err),
                }
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with_deps(
            move |_| {
                load.emit(String::new());
                || ()
            },
            (),
        );
    }

    html! {
        <>
            <div class="dashboard-toolbar">
                <input
                    type="text"
                    placeholder="Category"
                    value={(*category).clone()}
                    oninput={{
                        let category = category.clone();
                        Callback::from(move |e: InputEvent| category.set(input_value(&e)))
                    }}
                />
                <button class="iq-button" onclick={{
                    let category = category.clone();
                    load.reform(move |_: MouseEvent| (*category).clone())
                }}>
                    {"Filter"}
                </button>
            </div>
            if settings.is_empty() {
                <p class="empty-state">{"No settings."}</p>
            } else {
                <table class="users-table">
                    <thead>
                        <tr>
                            <th>{"Key"}</th>
                            <th>{"Value"}</th>
                            <th>{"Category"}</th>
                            <th>{"Description"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for settings.iter().map(|setting| html! {
                            <tr key={setting.id}>
                                <td>{ &setting.key }</td>
                                <td>{ &setting.value }</td>
                                <td>{ &setting.category }</td>
                                <td>{ &setting.description }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: u64) -> ContactRecord {
        ContactRecord { id, name: format!("lead {}", id), ..ContactRecord::default() }
    }

    #[test]
    fn overlapping_updates_both_apply() {
        let list = ContactList::default().apply(ContactListAction::Replace(vec![contact(1), contact(2), contact(3)]));
        // both responses were issued against the same three-row list
        let list = list.apply(ContactListAction::MarkRead(1));
        let list = list.apply(ContactListAction::Remove(3));
        let rows: Vec<(u64, bool)> = list.contacts.iter().map(|c| (c.id, c.read)).collect();
        assert_eq!(rows, vec![(1, true), (2, false)]);
    }

    #[test]
    fn unknown_ids_leave_the_list_alone() {
        let list = ContactList::default().apply(ContactListAction::Replace(vec![contact(1)]));
        assert_eq!(list.apply(ContactListAction::MarkRead(9)), list);
        assert_eq!(list.apply(ContactListAction::Remove(9)), list);
    }

    #[test]
    fn date_inputs_parse_as_calendar_days() {
        assert_eq!(parse_day("2024-03-01"), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(parse_day(""), None);
        assert_eq!(parse_day("01/03/2024"), None);
    }
}
