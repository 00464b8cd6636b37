//! Tab strip and the `?tab=` query binding used by tabbed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hold a `RwSignal<TabSelection<T>>`. Pages whose tabs are deep
//! linkable create it with [`use_tab_query`], which keeps the selection and
//! the URL in step without adding history entries.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};

use crate::state::tabs::{TAB_QUERY_PARAM, TabSelection, TabSet};
use crate::util::class_merge::{merge_class_fragments, when};

#[component]
pub fn TabBar<T>(selection: RwSignal<TabSelection<T>>) -> impl IntoView
where
    T: TabSet,
{
    let tabs = T::ALL
        .iter()
        .copied()
        .map(|tab| {
            let active = move || selection.with(|s| s.is_active(tab));
            let class = move || {
                merge_class_fragments([
                    Some("tab px-3 py-2 border-b-2 border-transparent text-slate-500"),
                    when(active(), "tab--active border-slate-900 text-slate-900 font-semibold"),
                ])
            };
            view! {
                <button
                    type="button"
                    role="tab"
                    class=class
                    aria-selected=move || active().to_string()
                    on:click=move |_| {
                        selection.maybe_update(|s| s.set_tab(tab));
                    }
                >
                    {tab.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="tab-bar flex gap-2" role="tablist">{tabs}</div> }
}

/// Tab selection initialised from `?tab=` and mirrored back into it.
///
/// Unknown query values select the default tab. Selecting a tab replaces the
/// current history entry; the default tab drops the parameter.
pub fn use_tab_query<T: TabSet>() -> RwSignal<TabSelection<T>> {
    let query = use_query_map();
    let location = use_location();
    let navigate = use_navigate();
    let from_url = move || TabSelection::<T>::from_query(query.read().get(TAB_QUERY_PARAM).as_deref());
    let selection = RwSignal::new(untrack(from_url));

    // Back/forward and pasted links.
    Effect::new(move || {
        let next = from_url().active();
        selection.maybe_update(|s| s.set_tab(next));
    });

    Effect::new(move || {
        let current = selection.get();
        if untrack(from_url) == current {
            return;
        }
        let path = location.pathname.get_untracked();
        let href = match current.query_value() {
            Some(key) => format!("{path}?{TAB_QUERY_PARAM}={key}"),
            None => path,
        };
        navigate(&href, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    selection
}
