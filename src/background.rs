use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, info_span, Instrument};
use crate::domain::models::job::{Job, JOB_ASSIGNMENT, JOB_INVITATION};
use crate::error::AppError;
use crate::state::AppState;

pub async fn start_background_worker(state: Arc<AppState>) {
    info!("Starting background job worker...");

    loop {
        match state.job_repo.find_pending(10).await {
            Ok(jobs) => {
                for job in jobs {
                    let job_id = job.id.clone();
                    let job_type = job.job_type.clone();
                    let event_id = job.payload.event_id.clone();

                    let span = info_span!(
                        "background_job",
                        job_id = %job_id,
                        job_type = %job_type,
                        event_id = %event_id
                    );

                    let state = state.clone();

                    async move {
                        info!("Processing job: {}", job_type);
                        match process_job(&state, &job).await {
                            Ok(_) => {
                                info!("Job completed successfully");
                                if let Err(e) = state.job_repo.update_status(&job.id, "COMPLETED", None).await {
                                    error!("Failed to mark job as completed: {:?}", e);
                                }
                            },
                            Err(e) => {
                                let err_msg = format!("{}", e);
                                error!("Job failed with error: {}", err_msg);
                                if let Err(up_err) = state.job_repo.update_status(&job.id, "FAILED", Some(err_msg)).await {
                                    error!("Failed to mark job as failed: {:?}", up_err);
                                }
                            }
                        }
                    }
                        .instrument(span)
                        .await;
                }
            }
            Err(e) => error!("Failed to fetch pending jobs: {:?}", e),
        }
        sleep(Duration::from_secs(5)).await;
    }
}

async fn process_job(state: &Arc<AppState>, job: &Job) -> Result<(), AppError> {
    let event_id = &job.payload.event_id;
    let subject_id = &job.payload.subject_id;

    let event = state.event_repo.find_by_id(event_id).await?
        .ok_or(AppError::NotFound(format!("Event {} not found", event_id)))?;

    match job.job_type.as_str() {
        JOB_INVITATION => {
            let invitation = state.invitation_repo.find_by_id(subject_id).await?
                .ok_or(AppError::NotFound(format!("Invitation {} not found", subject_id)))?;
            let email = invitation.email
                .ok_or(AppError::Validation("Invitation has no email".into()))?;
            let inviter = state.user_repo.find_by_id(&invitation.invited_by).await?
                .ok_or(AppError::NotFound(format!("User {} not found", invitation.invited_by)))?;

            let mut context = tera::Context::new();
            context.insert("event_title", &event.title);
            context.insert("event_description", &event.description);
            context.insert("event_date", &event.event_date.format("%Y-%m-%d").to_string());
            context.insert("inviter_name", &inviter.display_name);

            let accept_link = format!("{}/invite/{}", state.config.frontend_url, invitation.token);
            context.insert("accept_link", &accept_link);

            let html = state.templates.render("invitation.html", &context)
                .map_err(|e| AppError::InternalWithMsg(format!("Template render error: {:?}", e)))?;
            let subject = format!("You're invited to {}", event.title);

            info!("Sending invitation email to {}", email);
            state.email_service.send(&email, &subject, &html).await?;
        }
        JOB_ASSIGNMENT => {
            let assignment = state.assignment_repo.find_by_id(subject_id).await?
                .ok_or(AppError::NotFound(format!("Assignment {} not found", subject_id)))?;
            let giver = state.user_repo.find_by_id(&assignment.giver_id).await?
                .ok_or(AppError::NotFound(format!("User {} not found", assignment.giver_id)))?;
            let receiver = state.user_repo.find_by_id(&assignment.receiver_id).await?
                .ok_or(AppError::NotFound(format!("User {} not found", assignment.receiver_id)))?;

            let mut context = tera::Context::new();
            context.insert("giver_name", &giver.display_name);
            context.insert("receiver_name", &receiver.display_name);
            context.insert("event_title", &event.title);
            context.insert("event_date", &event.event_date.format("%Y-%m-%d").to_string());

            let wishlist_link = format!("{}/events/{}/wishes", state.config.frontend_url, event.id);
            context.insert("wishlist_link", &wishlist_link);

            let html = state.templates.render("assignment.html", &context)
                .map_err(|e| AppError::InternalWithMsg(format!("Template render error: {:?}", e)))?;
            let subject = format!("Your giftee for {} has been drawn", event.title);

            info!("Sending assignment email to {}", giver.email);
            state.email_service.send(&giver.email, &subject, &html).await?;
        }
        other => {
            return Err(AppError::InternalWithMsg(format!("Unknown job type {}", other)));
        }
    }

    Ok(())
}
