use actix_web::{HttpResponse, web};
use diesel::prelude::*;
use log::info;

use crate::error::ApiError;
use crate::handlers::message;
use crate::models::PrescribedMedicationPayload;
use crate::schema::prescribed_medications;
use crate::store::Store;

// Links a medication to a treatment. Both rows must already exist.
// There is no route to read a prescription back, so no Location header either.
pub async fn create_prescribed_medication(
    store: web::Data<Store>,
    prescription_data: web::Json<PrescribedMedicationPayload>,
) -> Result<HttpResponse, ApiError> {
    let prescription = prescription_data.into_inner();
    let (treatment_id, medication_id) = (prescription.treatment_id, prescription.medication_id);
    let id = store
        .run(move |conn| {
            Ok(diesel::insert_into(prescribed_medications::table)
                .values(&prescription)
                .returning(prescribed_medications::id)
                .get_result::<i32>(conn)?)
        })
        .await?;
    info!("prescription {id}: medication {medication_id} for treatment {treatment_id}");
    Ok(message("New prescribed medication created."))
}
