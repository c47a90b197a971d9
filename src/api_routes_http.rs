use actix_web::web;
use kgotla_api::{
  group::join::join_group,
  person::{
    my_profile::{get_my_profile, update_my_profile},
    notifications::{list_notifications, mark_all_notifications_read},
    tip::send_tip,
  },
  post::{bookmark::bookmark_post, lock::lock_post},
  site::get_site,
  vote::cast::cast_vote,
};
use kgotla_api_crud::{
  comment::{
    create::create_comment,
    delete::delete_comment,
    list::list_comments,
    update::update_comment,
  },
  group::{create::create_group, list::list_groups, read::get_group},
  post::{
    create::create_post,
    delete::delete_post,
    list::list_posts,
    read::get_post,
    update::update_post,
  },
};

pub fn config(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      // Site
      .service(web::scope("/site").route("", web::get().to(get_site)))
      // Votes
      .service(web::resource("/votes").route(web::post().to(cast_vote)))
      // Post
      .service(
        web::scope("/post")
          .route("", web::post().to(create_post))
          .route("", web::get().to(get_post))
          .route("", web::put().to(update_post))
          .route("/delete", web::post().to(delete_post))
          .route("/list", web::get().to(list_posts))
          .route("/bookmark", web::post().to(bookmark_post))
          .route("/lock", web::post().to(lock_post)),
      )
      // Comment
      .service(
        web::scope("/comment")
          .route("", web::post().to(create_comment))
          .route("", web::put().to(update_comment))
          .route("/delete", web::post().to(delete_comment))
          .route("/list", web::get().to(list_comments)),
      )
      // Group
      .service(
        web::scope("/group")
          .route("", web::post().to(create_group))
          .route("", web::get().to(get_group))
          .route("/list", web::get().to(list_groups))
          .route("/join", web::post().to(join_group)),
      )
      // User
      .service(
        web::scope("/user")
          .route("", web::get().to(get_my_profile))
          .route("", web::put().to(update_my_profile))
          .route("/notifications", web::get().to(list_notifications))
          .route(
            "/notifications/mark_all_read",
            web::post().to(mark_all_notifications_read),
          )
          .route("/tip", web::post().to(send_tip)),
      ),
  );
}
