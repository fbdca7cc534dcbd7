use leptos::prelude::*;

use crate::state::Feed;

#[component]
pub fn StoryFeed(feed: Feed) -> impl IntoView {
    if feed.is_empty() {
        return view! {
            <p style="color: #66cc88; font-size: 12px;">"No stories yet."</p>
        }
        .into_any();
    }

    let items = feed
        .stories
        .into_iter()
        .map(|story| {
            let badge = story.badge();
            let caption = story.caption.clone().unwrap_or_else(|| story.username.clone());
            let media_url = story.media_url.clone();
            let username = story.username.clone();
            view! {
                <li style="list-style: none;">
                    <button
                        style="background: #020202; color: #ccffdd; border: 1px solid #44dd66; \
                               padding: 12px 16px; cursor: pointer; min-width: 120px; \
                               font-family: inherit; font-size: 12px;"
                        on:click=move |_| crate::open_story_modal(&media_url, &username)
                    >
                        <span style="color: #66cc88; margin-right: 8px;">{badge}</span>
                        {caption}
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <ul style="display: flex; gap: 12px; padding: 0; margin: 0 0 24px 0;">
            {items}
        </ul>
    }
    .into_any()
}
