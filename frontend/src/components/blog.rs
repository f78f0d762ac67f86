use yew::prelude::*;

use crate::config;
use crate::data::blog_posts;

#[function_component(Blog)]
pub fn blog() -> Html {
    let posts = use_memo(|_| blog_posts(config::BLOG_POST_COUNT), ());

    html! {
        <section id="blog" class="section">
            <div class="container">
                <h2 class="section-title">{"Articles"}</h2>
                <div class="card-grid">
                    { for posts.iter().map(|post| html! {
                        <article key={post.id} class="post-card">
                            <img src={post.image_ref.clone()} alt="" loading="lazy" />
                            <div class="post-body">
                                <div class="post-date">{ post.date.clone() }</div>
                                <h3 class="card-title">{ post.title.clone() }</h3>
                                <p class="card-text">{post.excerpt}</p>
                                <a href="#" class="text-link">{"Read more"}</a>
                            </div>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}
